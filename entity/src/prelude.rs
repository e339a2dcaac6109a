pub use super::accommodation::Entity as Accommodation;
pub use super::accommodation_amenity::Entity as AccommodationAmenity;
pub use super::amenity::Entity as Amenity;
pub use super::booking::Entity as Booking;
pub use super::payment::Entity as Payment;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
pub use super::wishlist_item::Entity as WishlistItem;
