pub mod login_router;

// Re-export for convenience
pub use login_router::LoginRouter;
