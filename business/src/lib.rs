pub mod application {
    pub mod barcode {
        pub mod resolve;
    }
    pub mod receipt {
        pub mod normalize;
    }
}

pub mod domain {
    pub mod logger;
    pub mod shared {
        pub mod attempts;
    }
    pub mod barcode {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod resolve;
        }
    }
    pub mod receipt {
        pub mod amounts;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod normalize;
        }
    }
}
