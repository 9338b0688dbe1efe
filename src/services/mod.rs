pub mod stop_matcher;
