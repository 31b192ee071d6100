pub mod resolved_parameters;
