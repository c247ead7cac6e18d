use std::fmt;

use super::portfolio::AssetTable;
use super::send::Chain;

/// Page element identifiers; these names are the page contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    Balance,
    Assets,
    Address,
    EthBalances,
    BaseBalances,
    Refresh,
    SendChain,
    SendTo,
    SendAmount,
    SendGasPrice,
    SendBtn,
    ReceiveBtn,
    SendStatus,
}

impl ElementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Balance => "balance",
            ElementId::Assets => "assets",
            ElementId::Address => "address",
            ElementId::EthBalances => "eth-balances",
            ElementId::BaseBalances => "base-balances",
            ElementId::Refresh => "refresh",
            ElementId::SendChain => "send-chain",
            ElementId::SendTo => "send-to",
            ElementId::SendAmount => "send-amount",
            ElementId::SendGasPrice => "send-gas-price",
            ElementId::SendBtn => "send-btn",
            ElementId::ReceiveBtn => "receive-btn",
            ElementId::SendStatus => "send-status",
        }
    }

    /// Region holding a chain's balances table
    pub fn balances_for(chain: Chain) -> Self {
        match chain {
            Chain::Eth => ElementId::EthBalances,
            Chain::Base => ElementId::BaseBalances,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of a display region. Always data, never markup.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionContent {
    Text(String),
    Table(AssetTable),
    /// Text followed by a link, e.g. a transaction hash
    Link {
        prefix: String,
        text: String,
        href: String,
    },
}

impl RegionContent {
    pub fn text(s: impl Into<String>) -> Self {
        RegionContent::Text(s.into())
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            RegionContent::Text(text) => text.lines().map(str::to_string).collect(),
            RegionContent::Table(table) => table.lines(),
            RegionContent::Link { prefix, text, .. } => vec![format!("{}{}", prefix, text)],
        }
    }
}

impl fmt::Display for RegionContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_regions() {
        assert_eq!(ElementId::balances_for(Chain::Eth).as_str(), "eth-balances");
        assert_eq!(ElementId::balances_for(Chain::Base).as_str(), "base-balances");
    }

    #[test]
    fn test_link_text() {
        let content = RegionContent::Link {
            prefix: "✅ Sent! Tx: ".into(),
            text: "0xdeadbeef".into(),
            href: "https://etherscan.io/tx/0xdeadbeef".into(),
        };
        assert_eq!(content.to_string(), "✅ Sent! Tx: 0xdeadbeef");
    }
}
