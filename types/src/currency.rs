//! Cryptocurrencies a listing can be paid in.

wire_enum! {
    pub enum Cryptocurrency {
        Part => "PART",
        Btc => "BTC",
    }
}
