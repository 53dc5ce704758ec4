// Route handlers. Each is a plain async fn, callable from tests without
// going through the router.

pub mod discovery;
pub mod health;
pub mod validate;
