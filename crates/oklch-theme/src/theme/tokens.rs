//! Semantic token roles and the per-mode token set.

use crate::color::Oklch;

/// Light or dark variant of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

/// A named design variable. Declaration order is stylesheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenRole {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
    Sidebar,
    SidebarForeground,
    SidebarPrimary,
    SidebarPrimaryForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
    SidebarRing,
    Chart1,
    Chart2,
    Chart3,
    Chart4,
    Chart5,
}

impl TokenRole {
    pub const ALL: [TokenRole; 32] = [
        TokenRole::Background,
        TokenRole::Foreground,
        TokenRole::Card,
        TokenRole::CardForeground,
        TokenRole::Popover,
        TokenRole::PopoverForeground,
        TokenRole::Primary,
        TokenRole::PrimaryForeground,
        TokenRole::Secondary,
        TokenRole::SecondaryForeground,
        TokenRole::Muted,
        TokenRole::MutedForeground,
        TokenRole::Accent,
        TokenRole::AccentForeground,
        TokenRole::Destructive,
        TokenRole::DestructiveForeground,
        TokenRole::Border,
        TokenRole::Input,
        TokenRole::Ring,
        TokenRole::Sidebar,
        TokenRole::SidebarForeground,
        TokenRole::SidebarPrimary,
        TokenRole::SidebarPrimaryForeground,
        TokenRole::SidebarAccent,
        TokenRole::SidebarAccentForeground,
        TokenRole::SidebarBorder,
        TokenRole::SidebarRing,
        TokenRole::Chart1,
        TokenRole::Chart2,
        TokenRole::Chart3,
        TokenRole::Chart4,
        TokenRole::Chart5,
    ];

    /// The five chart roles, in ramp order.
    pub const CHART: [TokenRole; 5] = [
        TokenRole::Chart1,
        TokenRole::Chart2,
        TokenRole::Chart3,
        TokenRole::Chart4,
        TokenRole::Chart5,
    ];

    /// Custom property name without the leading `--`.
    pub fn css_name(self) -> &'static str {
        match self {
            TokenRole::Background => "background",
            TokenRole::Foreground => "foreground",
            TokenRole::Card => "card",
            TokenRole::CardForeground => "card-foreground",
            TokenRole::Popover => "popover",
            TokenRole::PopoverForeground => "popover-foreground",
            TokenRole::Primary => "primary",
            TokenRole::PrimaryForeground => "primary-foreground",
            TokenRole::Secondary => "secondary",
            TokenRole::SecondaryForeground => "secondary-foreground",
            TokenRole::Muted => "muted",
            TokenRole::MutedForeground => "muted-foreground",
            TokenRole::Accent => "accent",
            TokenRole::AccentForeground => "accent-foreground",
            TokenRole::Destructive => "destructive",
            TokenRole::DestructiveForeground => "destructive-foreground",
            TokenRole::Border => "border",
            TokenRole::Input => "input",
            TokenRole::Ring => "ring",
            TokenRole::Sidebar => "sidebar",
            TokenRole::SidebarForeground => "sidebar-foreground",
            TokenRole::SidebarPrimary => "sidebar-primary",
            TokenRole::SidebarPrimaryForeground => "sidebar-primary-foreground",
            TokenRole::SidebarAccent => "sidebar-accent",
            TokenRole::SidebarAccentForeground => "sidebar-accent-foreground",
            TokenRole::SidebarBorder => "sidebar-border",
            TokenRole::SidebarRing => "sidebar-ring",
            TokenRole::Chart1 => "chart-1",
            TokenRole::Chart2 => "chart-2",
            TokenRole::Chart3 => "chart-3",
            TokenRole::Chart4 => "chart-4",
            TokenRole::Chart5 => "chart-5",
        }
    }
}

/// Every role's color for one mode, in stylesheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticTokenSet {
    mode: Mode,
    tokens: Vec<(TokenRole, Oklch)>,
}

impl SemanticTokenSet {
    /// Build the set by evaluating `color_for` once per role.
    pub(crate) fn from_fn(mode: Mode, mut color_for: impl FnMut(TokenRole) -> Oklch) -> Self {
        let tokens = TokenRole::ALL
            .into_iter()
            .map(|role| (role, color_for(role)))
            .collect();
        Self { mode, tokens }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn get(&self, role: TokenRole) -> Option<Oklch> {
        self.tokens
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, color)| *color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenRole, Oklch)> + '_ {
        self.tokens.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
