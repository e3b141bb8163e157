pub mod shared {
    pub mod infrastructure {
        pub mod clock;
        pub mod key_value_storage;
    }
}

pub mod modules {
    pub mod appointments {
        pub mod core {
            pub mod appointment;
            pub mod mutation;
            pub mod ports;
            pub mod store;
            pub mod views;
        }
        pub mod use_cases {
            pub mod submit_appointment {
                pub mod decide;
                pub mod decision;
                pub mod draft;
            }
            pub mod interaction {
                pub mod controller;
                pub mod intent;
                pub mod view_mode;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod persistence;
            }
        }
    }
}

pub mod shell;
