pub mod wind;
