pub mod application {
    pub mod auth {
        pub mod sign_in;
    }
    pub mod import {
        pub mod import_products;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod delete_many;
        pub mod get_all;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod provider;
        pub mod use_cases {
            pub mod sign_in;
        }
    }
    pub mod import {
        pub mod errors;
        pub mod reconciler;
        pub mod report;
        pub mod row;
        pub mod row_source;
        pub mod use_cases {
            pub mod import_products;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod expiry;
        pub mod list_view;
        pub mod model;
        pub mod repository;
        pub mod selection;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod delete_many;
            pub mod get_all;
            pub mod update;
        }
    }
}
