pub mod adapter_state;
pub mod generation_result;
