pub mod scope_exit;
