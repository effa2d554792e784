use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::predicate::criteria::CriteriaValue;

/// Declares an enum whose variants are stored as lower case strings.
macro_rules! value_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl CriteriaValue for $name {
            fn to_criteria_value(&self) -> Value {
                Value::String(self.as_str().to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

value_enum!(AnnouncementType {
    Rent => "rent",
    Sublease => "sublease",
    Sharing => "sharing",
});

value_enum!(AnnouncementStatus {
    Enabled => "enabled",
    Disabled => "disabled",
    Filled => "filled",
});

value_enum!(HousingType {
    Apartment => "apartment",
    House => "house",
    Studio => "studio",
});

value_enum!(GroupStatus {
    Opened => "opened",
    Closed => "closed",
});

value_enum!(
    /// Whether a user searches for a housing or proposes one.
    UserType {
        Search => "search",
        Proposal => "proposal",
    }
);

value_enum!(UserStatus {
    Pending => "pending",
    Enabled => "enabled",
    Vacation => "vacation",
    Banned => "banned",
});

value_enum!(Gender {
    Male => "male",
    Female => "female",
    Unknown => "unknown",
});

value_enum!(Diet {
    Meat => "meat",
    Vegetarian => "vegetarian",
    Vegan => "vegan",
    Unknown => "unknown",
});

value_enum!(MaritalStatus {
    Couple => "couple",
    Single => "single",
    Unknown => "unknown",
});

value_enum!(SocialStatus {
    Student => "student",
    Worker => "worker",
    Unknown => "unknown",
});

value_enum!(
    /// Who started an invitation: the invitable owner (`invitation`) or the
    /// searching user (`search`).
    InvitationSource {
        Search => "search",
        Invitation => "invitation",
    }
);

value_enum!(VisitableKind {
    Announcement => "announcement",
    Group => "group",
    User => "user",
});
