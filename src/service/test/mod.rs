mod booking;
mod lot;
