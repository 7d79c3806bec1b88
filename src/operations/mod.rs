pub mod op_helper;
pub mod regenerate_op;
pub mod setup_op;
pub mod switch_op;
