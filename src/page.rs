// What a page-transition event means for the mounted background.

/// Outcome of `pagehide` / `pageshow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    /// The page is entering the back/forward cache; keep everything and pause.
    Suspend,
    /// The page is being discarded; release everything.
    Unload,
    /// The page came back from the back/forward cache; resume.
    Restore,
    /// A fresh load; the mount path already ran.
    Load,
}

impl PageTransition {
    pub fn on_hide(persisted: bool) -> Self {
        if persisted {
            Self::Suspend
        } else {
            Self::Unload
        }
    }

    pub fn on_show(persisted: bool) -> Self {
        if persisted {
            Self::Restore
        } else {
            Self::Load
        }
    }

    /// Whether the coordinator and its listeners must be dropped.
    pub fn tears_down(self) -> bool {
        self == Self::Unload
    }

    /// Page visibility the coordinator should see after this transition, if
    /// it changes.
    pub fn visibility(self) -> Option<bool> {
        match self {
            Self::Suspend => Some(false),
            Self::Restore => Some(true),
            Self::Unload | Self::Load => None,
        }
    }
}
