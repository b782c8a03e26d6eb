// JSON/HTTP surface over the prediction engine
pub mod http;
