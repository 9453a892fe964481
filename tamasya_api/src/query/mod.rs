mod common;
pub use self::common::{Query, SortDirection};

mod destination;
pub use self::destination::DestinationQuery;

mod user;
pub use self::user::{UserQuery, UserSortBy};

mod checkout;
pub use self::checkout::CheckoutQuery;

mod booking;
pub use self::booking::BookingQuery;
