use std::{fmt, str::FromStr};

/// Closed set of definition kinds found in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Underlay,
    Overlay,
    Texture,
    Sprite,
    Object,
    Area,
    Item,
    Kit,
    Npc,
    Sequence,
    SpotAnimation,
    Varbit,
    MapScene,
}

impl RecordKind {
    pub const ALL: [RecordKind; 13] = [
        Self::Underlay,
        Self::Overlay,
        Self::Texture,
        Self::Sprite,
        Self::Object,
        Self::Area,
        Self::Item,
        Self::Kit,
        Self::Npc,
        Self::Sequence,
        Self::SpotAnimation,
        Self::Varbit,
        Self::MapScene,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underlay => "underlays",
            Self::Overlay => "overlays",
            Self::Texture => "textures",
            Self::Sprite => "sprites",
            Self::Object => "objects",
            Self::Area => "areas",
            Self::Item => "items",
            Self::Kit => "kits",
            Self::Npc => "npcs",
            Self::Sequence => "sequences",
            Self::SpotAnimation => "spotanims",
            Self::Varbit => "varbits",
            Self::MapScene => "mapscenes",
        }
    }

    /// Partition holding this kind's entries, one file per definition.
    pub fn partition(&self) -> PartitionId {
        const CONFIGS: u8 = 2;
        match self {
            Self::Underlay => PartitionId::archive(CONFIGS, 1),
            Self::Kit => PartitionId::archive(CONFIGS, 3),
            Self::Overlay => PartitionId::archive(CONFIGS, 4),
            Self::Object => PartitionId::archive(CONFIGS, 6),
            Self::Npc => PartitionId::archive(CONFIGS, 9),
            Self::Item => PartitionId::archive(CONFIGS, 10),
            Self::Sequence => PartitionId::archive(CONFIGS, 12),
            Self::SpotAnimation => PartitionId::archive(CONFIGS, 13),
            Self::Varbit => PartitionId::archive(CONFIGS, 14),
            Self::MapScene => PartitionId::archive(CONFIGS, 34),
            Self::Area => PartitionId::archive(CONFIGS, 35),
            Self::Sprite => PartitionId::Index(8),
            Self::Texture => PartitionId::archive(9, 0),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown definition kind '{s}'"))
    }
}

/// Location of a kind's files inside the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartitionId {
    /// Every group of an index is one file.
    Index(u8),
    /// Every file of one archive inside an index.
    Archive { index: u8, archive: u32 },
}

impl PartitionId {
    pub fn archive(index: u8, archive: u32) -> Self {
        Self::Archive { index, archive }
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Archive { index, archive } => write!(f, "{index}/{archive}"),
        }
    }
}
