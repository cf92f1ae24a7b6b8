pub mod member_ops;
