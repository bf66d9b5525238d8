pub mod form;
pub mod method_override;
