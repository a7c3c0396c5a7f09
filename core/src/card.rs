use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Built-in card faces used when no custom images are supplied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Icon {
    Anchor,
    Bell,
    Cake,
    Camera,
    Coffee,
    Face,
    Flower,
    Gift,
    Heart,
    Home,
    Key,
    Leaf,
    LightningBolt,
    Moon,
    Music,
    Plane,
    School,
    Send,
    Star,
    Work,
}

pub const DEFAULT_ICONS: [Icon; 20] = {
    use Icon::*;
    [
        Anchor,
        Bell,
        Cake,
        Camera,
        Coffee,
        Face,
        Flower,
        Gift,
        Heart,
        Home,
        Key,
        Leaf,
        LightningBolt,
        Moon,
        Music,
        Plane,
        School,
        Send,
        Star,
        Work,
    ]
};

impl Icon {
    pub const fn name(self) -> &'static str {
        use Icon::*;
        match self {
            Anchor => "anchor",
            Bell => "bell",
            Cake => "cake",
            Camera => "camera",
            Coffee => "coffee",
            Face => "face",
            Flower => "flower",
            Gift => "gift",
            Heart => "heart",
            Home => "home",
            Key => "key",
            Leaf => "leaf",
            LightningBolt => "bolt",
            Moon => "moon",
            Music => "music",
            Plane => "plane",
            School => "school",
            Send => "send",
            Star => "star",
            Work => "work",
        }
    }
}

/// What a card shows when face up. Only equality matters to the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    Icon(Icon),
    /// Reference to an uploaded image, usually a download URL.
    Image(String),
}

impl From<Icon> for Identifier {
    fn from(icon: Icon) -> Self {
        Self::Icon(icon)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Icon(icon) => f.write_str(icon.name()),
            Self::Image(reference) => f.write_str(reference),
        }
    }
}

/// Per-card state. `Matched` is terminal and always face up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

impl CardState {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::FaceUp | Self::Matched)
    }

    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    identifier: Identifier,
    state: CardState,
}

impl Card {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            state: CardState::FaceDown,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_face_up(&self) -> bool {
        self.state.is_face_up()
    }

    pub fn is_matched(&self) -> bool {
        self.state.is_matched()
    }

    /// The identifier, but only while it is visible.
    pub fn visible_identifier(&self) -> Option<&Identifier> {
        self.is_face_up().then_some(&self.identifier)
    }

    pub(crate) fn turn_face_up(&mut self) {
        if self.state == CardState::FaceDown {
            self.state = CardState::FaceUp;
        }
    }

    pub(crate) fn turn_face_down(&mut self) {
        if self.state == CardState::FaceUp {
            self.state = CardState::FaceDown;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.state = CardState::Matched;
    }
}
