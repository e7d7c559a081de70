//! Arm identities and display labels.
//!
//! Ordering comes from outside; indices are opaque keys here and labels are
//! only ever used for diagnostics.

use std::borrow::Cow;

/// One selectable contest variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arm {
    pub index: usize,
    pub display_name: String,
}

/// Ordered arm list, index-aligned with the fight records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmRoster {
    arms: Vec<Arm>,
}

impl ArmRoster {
    /// Build a roster from names in arm-index order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arms = names
            .into_iter()
            .enumerate()
            .map(|(index, n)| Arm {
                index,
                display_name: n.into(),
            })
            .collect();
        Self { arms }
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    pub fn get(&self, index: usize) -> Option<&Arm> {
        self.arms.get(index)
    }

    /// Display label for `index`, or `arm{index}` when the roster has no entry.
    pub fn label(&self, index: usize) -> Cow<'_, str> {
        match self.arms.get(index) {
            Some(a) => Cow::Borrowed(a.display_name.as_str()),
            None => Cow::Owned(format!("arm{index}")),
        }
    }
}
