//! Escrow and sale enumerations declared by a listing.

wire_enum! {
    /// The cryptographic mechanism securing the trade funds.
    pub enum EscrowType {
        /// 2-of-2 multisignature escrow.
        Multisig => "MULTISIG",
        /// Mutually assured destruction over plain outputs.
        Mad => "MAD",
        /// Mutually assured destruction over confidential transactions.
        MadCt => "MAD_CT",
        /// Finalised escrow.
        Fe => "FE",
    }
}

wire_enum! {
    /// How the escrowed funds are released to the seller.
    pub enum EscrowReleaseType {
        Anon => "ANON",
        Blind => "BLIND",
    }
}

wire_enum! {
    pub enum SaleType {
        Sale => "SALE",
        Rent => "RENT",
        Auction => "AUCTION",
        Free => "FREE",
    }
}
