// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests and the demo binary import modules from this crate root.

pub mod core {
    pub mod event;
    pub mod ports;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_event_index;
    }
}
