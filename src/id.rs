//! Strongly typed identifiers that scope Control API requests.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (household, group, player, favorite, playlist).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (household, group, player, favorite, playlist).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (household, group, player, favorite, playlist).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { HouseholdId, "Identifier of a Sonos household.", "Household" }
def_id! { GroupId, "Identifier of a group of players inside a household.", "Group" }
def_id! { PlayerId, "Identifier of a single player.", "Player" }
def_id! { FavoriteId, "Identifier of a Sonos favorite.", "Favorite" }
def_id! { PlaylistId, "Identifier of a Sonos playlist.", "Playlist" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn identifiers_validate_whitespace_and_emptiness() {
		assert!(GroupId::new(" XYZ-123").is_err(), "Leading whitespace must be rejected.");
		assert!(GroupId::new("XYZ-123 ").is_err(), "Trailing whitespace must be rejected.");
		assert_eq!(HouseholdId::new(""), Err(IdentifierError::Empty { kind: "Household" }));

		let group =
			GroupId::new("XYZ-123abc456:12").expect("Vendor group identifiers should be valid.");

		assert_eq!(group.as_ref(), "XYZ-123abc456:12");
		assert_eq!(format!("{group:?}"), "Group(XYZ-123abc456:12)");
	}

	#[test]
	fn serde_enforces_validation() {
		let household: HouseholdId = serde_json::from_str("\"HHID_4231\"")
			.expect("Household should deserialize successfully.");

		assert_eq!(household.as_ref(), "HHID_4231");
		assert!(serde_json::from_str::<PlayerId>("\"with space\"").is_err());
		assert_eq!(
			serde_json::to_string(&household).expect("Household should serialize."),
			"\"HHID_4231\""
		);
	}

	#[test]
	fn length_limit_is_inclusive() {
		let exact = "a".repeat(IDENTIFIER_MAX_LEN);

		FavoriteId::new(&exact).expect("Exact length should succeed.");

		let too_long = "a".repeat(IDENTIFIER_MAX_LEN + 1);

		assert_eq!(
			PlaylistId::new(&too_long),
			Err(IdentifierError::TooLong { kind: "Playlist", max: IDENTIFIER_MAX_LEN })
		);
	}

	#[test]
	fn identifier_errors_lift_into_crate_errors() {
		fn parse(raw: &str) -> Result<PlayerId> {
			Ok(raw.parse()?)
		}

		let err = parse("RINCON 1").expect_err("Whitespace should be rejected.");

		assert!(matches!(
			err,
			Error::Identifier(IdentifierError::ContainsWhitespace { kind: "Player" })
		));
		assert_eq!(err.to_string(), "Player identifier contains whitespace.");
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<GroupId, u8> = HashMap::from_iter([(
			GroupId::new("group-1").expect("Group used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("group-1"), Some(&7));
	}
}
