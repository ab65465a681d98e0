use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification severity. Controls the toast palette and icon.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Info,
        Severity::Warning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Background, border and text classes for the toast body.
    pub fn palette(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500/20 border-green-500/30 text-green-400",
            Severity::Error => "bg-red-500/20 border-red-500/30 text-red-400",
            Severity::Info => "bg-blue-500/20 border-blue-500/30 text-blue-400",
            Severity::Warning => "bg-yellow-500/20 border-yellow-500/30 text-yellow-400",
        }
    }

    /// Lucide icon name.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "x-circle",
            Severity::Info => "info",
            Severity::Warning => "alert-triangle",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Track,
    Album,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Track => "track",
            ItemKind::Album => "album",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub title: String,
    pub artist: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl CatalogItem {
    pub fn new(title: &str, artist: &str, kind: ItemKind) -> Self {
        Self {
            title: title.to_owned(),
            artist: artist.to_owned(),
            kind,
        }
    }
}

/// Track metadata carried on `[data-play]` buttons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

/// NFT metadata carried on `.nft-card` elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NftInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NftAction {
    #[serde(rename = "buy-nft")]
    Buy,
    #[serde(rename = "bid-nft")]
    Bid,
}

impl NftAction {
    pub fn as_str(self) -> &'static str {
        match self {
            NftAction::Buy => "buy-nft",
            NftAction::Bid => "bid-nft",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "buy-nft" => Some(NftAction::Buy),
            "bid-nft" => Some(NftAction::Bid),
            _ => None,
        }
    }
}
