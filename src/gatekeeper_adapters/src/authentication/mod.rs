pub mod hashmap_auth_use_case;

pub use hashmap_auth_use_case::HashMapAuthUseCase;
