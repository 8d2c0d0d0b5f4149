mod errors;
mod stub;
mod verify;
