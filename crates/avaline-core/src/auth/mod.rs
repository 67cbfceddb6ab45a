//! Authentication: the user repository and password hasher ports, the
//! signup/login service built on them, and the in-process session store.

pub mod hash;
pub mod repository;
pub mod service;
pub mod session;
