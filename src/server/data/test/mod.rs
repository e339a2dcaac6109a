mod accommodation;
mod amenity;
mod booking;
mod payment;
mod review;
mod user;
mod wishlist;
