use std::sync::Arc;

use logger::TracingLogger;

use firebase::auth::FirebaseAuthProvider;
use firebase::client::FirebaseClient;
use firebase::firestore::repository::FirestoreProductRepository;
use spreadsheet::XlsxRowSource;

use business::application::auth::sign_in::SignInUseCaseImpl;
use business::application::import::import_products::ImportProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::delete_many::DeleteManyProductsUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::firebase_config::FirebaseConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub import_api: crate::api::import::routes::ImportApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let firebase_config = FirebaseConfig::from_env();
        let auth_client = FirebaseClient::new(
            firebase_config.project_id.clone(),
            firebase_config.api_key.clone(),
        );
        let firestore_client =
            FirebaseClient::new(firebase_config.project_id, firebase_config.api_key);

        let auth_provider = Arc::new(FirebaseAuthProvider::new(auth_client));
        let product_repository = Arc::new(FirestoreProductRepository::new(firestore_client));
        let row_source = Arc::new(XlsxRowSource::new());

        // Auth use cases
        let sign_in_use_case = Arc::new(SignInUseCaseImpl {
            provider: auth_provider,
            logger: logger.clone(),
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_many_use_case = Arc::new(DeleteManyProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Import use cases
        let import_use_case = Arc::new(ImportProductsUseCaseImpl {
            repository: product_repository,
            row_source,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(sign_in_use_case);

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
            delete_many_use_case,
        );

        let import_api = crate::api::import::routes::ImportApi::new(import_use_case);

        Self {
            health_api,
            auth_api,
            product_api,
            import_api,
        }
    }
}
