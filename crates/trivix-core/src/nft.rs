use trivix_types::{NftAction, NftInfo};

use crate::error::UiError;
use crate::notify::Notice;

pub const PULSE_TRANSFORM: &str = "scale(0.95)";

pub fn parse_action(value: &str) -> Result<NftAction, UiError> {
    NftAction::parse(value).ok_or_else(|| UiError::UnknownNftAction(value.to_owned()))
}

pub fn action_notice(action: NftAction, title: &str) -> Notice {
    let message = match action {
        NftAction::Buy => format!("Purchasing {title}..."),
        NftAction::Bid => format!("Bidding on {title}..."),
    };
    Notice::info(message)
}

pub fn viewing_line(nft: &NftInfo) -> String {
    format!("Viewing NFT: {} ({})", nft.title, nft.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivix_types::Severity;

    #[test]
    fn buy_and_bid_produce_info_notices() {
        let buy = action_notice(parse_action("buy-nft").unwrap(), "Genesis #1");
        assert_eq!(buy.message, "Purchasing Genesis #1...");
        assert_eq!(buy.severity, Severity::Info);

        let bid = action_notice(NftAction::Bid, "Genesis #1");
        assert_eq!(bid.message, "Bidding on Genesis #1...");
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert_eq!(
            parse_action("burn-nft"),
            Err(UiError::UnknownNftAction("burn-nft".to_owned()))
        );
    }

    #[test]
    fn viewing_line_includes_id() {
        let nft = NftInfo {
            id: "42".into(),
            title: "Neon Skull".into(),
        };
        assert_eq!(viewing_line(&nft), "Viewing NFT: Neon Skull (42)");
    }
}
