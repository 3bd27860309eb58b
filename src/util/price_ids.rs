//! Built-in ticker -> CoinGecko id table, used when the currency list doesn't
//! supply a `coingecko` alternate name for a currency.

const COIN_GECKO_IDS: &[(&str, &str)] = &[
    ("BAT", "basic-attention-token"),
    ("BCH", "bitcoin-cash"),
    ("BRD", "bread"),
    ("BSV", "bitcoin-cash-sv"),
    ("BTC", "bitcoin"),
    ("DAI", "dai"),
    ("DOGE", "dogecoin"),
    ("ETH", "ethereum"),
    ("HBAR", "hedera-hashgraph"),
    ("KNC", "kyber-network"),
    ("LINK", "chainlink"),
    ("LTC", "litecoin"),
    ("MANA", "decentraland"),
    ("MKR", "maker"),
    ("OMG", "omisego"),
    ("PAX", "paxos-standard"),
    ("SNT", "status"),
    ("TUSD", "true-usd"),
    ("USDC", "usd-coin"),
    ("USDT", "tether"),
    ("WBTC", "wrapped-bitcoin"),
    ("XRP", "ripple"),
    ("XTZ", "tezos"),
    ("ZRX", "0x"),
];

/// Look up the CoinGecko id for a ticker. Case doesn't matter.
pub fn coin_gecko_id(code: &str) -> Option<&'static str> {
    let code = code.to_uppercase();
    COIN_GECKO_IDS.binary_search_by(|(ticker, _)| (*ticker).cmp(code.as_str()))
        .ok()
        .map(|idx| COIN_GECKO_IDS[idx].1)
}
