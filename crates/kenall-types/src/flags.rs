// ── Macro for flag-column enum boilerplate ────────────────────────────
//
// The trailing columns of a row are single digit characters drawn from a
// small documented set. Records keep the raw text so that unknown digits
// survive a decode/encode cycle untouched; these enums are typed views
// computed on demand.

macro_rules! flag_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $flag:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// The column text this variant is written as.
      #[must_use]
      pub fn as_flag(self) -> &'static str {
        match self {
          $( Self::$variant => $flag ),+
        }
      }

      /// Interpret a column value, `None` for anything outside the set.
      #[must_use]
      pub fn from_flag(value: &str) -> Option<Self> {
        match value {
          $( $flag => Some(Self::$variant), )+
          _ => None,
        }
      }
    }
  };
}

/// Whether a yes/no flag column is set (`"1"`).
///
/// Anything other than `"1"` reads as unset, including malformed values.
#[must_use]
pub fn is_set(value: &str) -> bool {
  value == "1"
}

// ── UpdateStatus ──────────────────────────────────────────────────────

flag_enum! {
  /// Update column: whether the row changed in this edition.
  ///
  /// ```text
  /// ┌──────┬───────────┐
  /// │ Flag │ Status    │
  /// ├──────┼───────────┤
  /// │ 0    │ Unchanged │
  /// │ 1    │ Changed   │
  /// │ 2    │ Abolished │
  /// └──────┴───────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum UpdateStatus {
    Unchanged = "0",
    Changed = "1",
    /// Only appears in the abolished-codes edition.
    Abolished = "2",
  }
}

// ── UpdateReason ──────────────────────────────────────────────────────

flag_enum! {
  /// Reason column: why the row changed.
  ///
  /// ```text
  /// ┌──────┬──────────────────────────────────────────────────┐
  /// │ Flag │ Reason                                           │
  /// ├──────┼──────────────────────────────────────────────────┤
  /// │ 0    │ No change                                        │
  /// │ 1    │ Municipal reorganisation (city, ward, town)      │
  /// │ 2    │ Residence indication scheme introduced           │
  /// │ 3    │ Land readjustment                                │
  /// │ 4    │ Postal district adjustment                       │
  /// │ 5    │ Correction                                       │
  /// │ 6    │ Abolished                                        │
  /// └──────┴──────────────────────────────────────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum UpdateReason {
    NoChange = "0",
    Municipal = "1",
    ResidenceIndication = "2",
    LandReadjustment = "3",
    PostalAdjustment = "4",
    Correction = "5",
    Abolished = "6",
  }
}
