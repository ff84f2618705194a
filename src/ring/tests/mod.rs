mod combine;
mod index;
mod rotate;
