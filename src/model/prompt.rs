// Value types shared by the resolver, the controller and the view.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of asset a prompt asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityType {
    #[default]
    Sprite,
    Costume,
    Sound,
}

impl EntityType {
    /// Parse a raw tag. Tags are upper case and matched exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "SPRITE" => Some(EntityType::Sprite),
            "COSTUME" => Some(EntityType::Costume),
            "SOUND" => Some(EntityType::Sound),
            _ => None,
        }
    }

    /// Parse a raw tag, falling back to `Sprite` for anything unrecognised.
    pub fn from_tag_lossy(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::warn!("unknown entity type {:?}, treating it as a sprite", tag);
            EntityType::Sprite
        })
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityType::Sprite => "sprite",
            EntityType::Costume => "costume",
            EntityType::Sound => "sound",
        };
        f.write_str(label)
    }
}

/// Preferred horizontal side of the anchor for the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    #[default]
    Unspecified,
}

impl Side {
    /// Next side in the order right, left, unspecified.
    pub fn cycled(self) -> Self {
        match self {
            Side::Right => Side::Left,
            Side::Left => Side::Unspecified,
            Side::Unspecified => Side::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Unspecified => "unspecified",
        })
    }
}

/// Layout direction in effect when a session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_right_to_left(self) -> bool {
        self == Direction::Rtl
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        })
    }
}

/// Bounding box of the trigger element, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub height: f64,
}

impl AnchorRect {
    pub fn new(top: f64, left: f64, right: f64, height: f64) -> Self {
        Self { top, left, right, height }
    }

    pub fn is_finite(&self) -> bool {
        [self.top, self.left, self.right, self.height].iter().all(|v| v.is_finite())
    }
}

/// Absolute top-left corner of the popup, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPosition {
    pub top: f64,
    pub left: f64,
}
