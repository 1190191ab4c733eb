pub mod lehmer;
