pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::auth;
pub use modules::comment;
pub use modules::event;
pub use modules::moderation;
pub use modules::upload;

#[cfg(test)]
mod tests;

use crate::admin::application::use_cases::grant_admin::{GrantAdminUseCase, IGrantAdminUseCase};
use crate::admin::application::use_cases::revoke_admin::{
    IRevokeAdminUseCase, RevokeAdminUseCase,
};
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::helpers::CurrentUserResolver;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::fetch_profile::{
    FetchProfileUseCase, IFetchProfileUseCase,
};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserUseCase};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserUseCase,
};
use crate::comment::adapter::outgoing::comment_repository_postgres::CommentRepositoryPostgres;
use crate::comment::application::use_cases::create_comment::{
    CreateCommentUseCase, ICreateCommentUseCase,
};
use crate::comment::application::use_cases::delete_comment::{
    DeleteCommentUseCase, IDeleteCommentUseCase,
};
use crate::comment::application::use_cases::list_event_comments::{
    IListEventCommentsUseCase, ListEventCommentsUseCase,
};
use crate::event::adapter::outgoing::event_repository_postgres::EventRepositoryPostgres;
use crate::event::application::ports::outgoing::EventRepository;
use crate::event::application::use_cases::attend_event::{AttendEventUseCase, IAttendEventUseCase};
use crate::event::application::use_cases::cancel_attendance::{
    CancelAttendanceUseCase, ICancelAttendanceUseCase,
};
use crate::event::application::use_cases::create_event::{CreateEventUseCase, ICreateEventUseCase};
use crate::event::application::use_cases::delete_event::{DeleteEventUseCase, IDeleteEventUseCase};
use crate::event::application::use_cases::events_by_creator::{
    EventsByCreatorUseCase, IEventsByCreatorUseCase,
};
use crate::event::application::use_cases::favorite_event::{
    FavoriteEventUseCase, IFavoriteEventUseCase,
};
use crate::event::application::use_cases::get_event::{GetEventUseCase, IGetEventUseCase};
use crate::event::application::use_cases::list_events::{IListEventsUseCase, ListEventsUseCase};
use crate::event::application::use_cases::list_favorites::{
    IListFavoritesUseCase, ListFavoritesUseCase,
};
use crate::event::application::use_cases::list_participants::{
    IListParticipantsUseCase, ListParticipantsUseCase,
};
use crate::event::application::use_cases::unfavorite_event::{
    IUnfavoriteEventUseCase, UnfavoriteEventUseCase,
};
use crate::event::application::use_cases::update_event::{IUpdateEventUseCase, UpdateEventUseCase};
use crate::moderation::adapter::outgoing::review_repository_postgres::ReviewRepositoryPostgres;
use crate::moderation::application::use_cases::approve_event::{
    ApproveEventUseCase, IApproveEventUseCase,
};
use crate::moderation::application::use_cases::edit_submission::{
    EditSubmissionUseCase, IEditSubmissionUseCase,
};
use crate::moderation::application::use_cases::list_pending::{
    IListPendingUseCase, ListPendingUseCase,
};
use crate::moderation::application::use_cases::reject_event::{
    IRejectEventUseCase, RejectEventUseCase,
};
use crate::moderation::application::use_cases::submit_event::{
    ISubmitEventUseCase, SubmitEventUseCase,
};
use crate::shared::api::json_config::custom_json_config;
use crate::upload::adapter::outgoing::LocalDiskStore;
use crate::upload::application::ports::outgoing::FileStore;
use crate::upload::application::use_cases::store_avatar::{
    IStoreAvatarUseCase, StoreAvatarUseCase,
};
use crate::upload::application::use_cases::store_event_image::{
    IStoreEventImageUseCase, StoreEventImageUseCase,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub current_user_resolver: CurrentUserResolver,
    // Auth
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    // Events
    pub create_event_use_case: Arc<dyn ICreateEventUseCase + Send + Sync>,
    pub list_events_use_case: Arc<dyn IListEventsUseCase + Send + Sync>,
    pub get_event_use_case: Arc<dyn IGetEventUseCase + Send + Sync>,
    pub update_event_use_case: Arc<dyn IUpdateEventUseCase + Send + Sync>,
    pub delete_event_use_case: Arc<dyn IDeleteEventUseCase + Send + Sync>,
    pub events_by_creator_use_case: Arc<dyn IEventsByCreatorUseCase + Send + Sync>,
    pub attend_event_use_case: Arc<dyn IAttendEventUseCase + Send + Sync>,
    pub cancel_attendance_use_case: Arc<dyn ICancelAttendanceUseCase + Send + Sync>,
    pub list_participants_use_case: Arc<dyn IListParticipantsUseCase + Send + Sync>,
    pub favorite_event_use_case: Arc<dyn IFavoriteEventUseCase + Send + Sync>,
    pub unfavorite_event_use_case: Arc<dyn IUnfavoriteEventUseCase + Send + Sync>,
    pub list_favorites_use_case: Arc<dyn IListFavoritesUseCase + Send + Sync>,
    // Moderation
    pub submit_event_use_case: Arc<dyn ISubmitEventUseCase + Send + Sync>,
    pub list_pending_use_case: Arc<dyn IListPendingUseCase + Send + Sync>,
    pub approve_event_use_case: Arc<dyn IApproveEventUseCase + Send + Sync>,
    pub reject_event_use_case: Arc<dyn IRejectEventUseCase + Send + Sync>,
    pub edit_submission_use_case: Arc<dyn IEditSubmissionUseCase + Send + Sync>,
    // Comments
    pub create_comment_use_case: Arc<dyn ICreateCommentUseCase + Send + Sync>,
    pub list_event_comments_use_case: Arc<dyn IListEventCommentsUseCase + Send + Sync>,
    pub delete_comment_use_case: Arc<dyn IDeleteCommentUseCase + Send + Sync>,
    // Admin
    pub grant_admin_use_case: Arc<dyn IGrantAdminUseCase + Send + Sync>,
    pub revoke_admin_use_case: Arc<dyn IRevokeAdminUseCase + Send + Sync>,
    // Upload
    pub store_avatar_use_case: Arc<dyn IStoreAvatarUseCase + Send + Sync>,
    pub store_event_image_use_case: Arc<dyn IStoreEventImageUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    let disk_store = LocalDiskStore::from_env();
    let media_root = disk_store.media_root().clone();
    let file_store_arc: Arc<dyn FileStore + Send + Sync> = Arc::new(disk_store);

    // Shared across handlers for token-subject resolution
    let current_user_resolver = CurrentUserResolver::new(Arc::new(user_repo.clone()));

    // Auth use cases
    let register_user_use_case =
        RegisterUserUseCase::new(user_repo.clone(), Arc::clone(&argon2_password_hasher));
    let login_user_use_case = LoginUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&argon2_password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let fetch_profile_use_case = FetchProfileUseCase::new(user_repo.clone());

    // Event use cases
    let event_repo_arc: Arc<dyn EventRepository + Send + Sync> = Arc::new(event_repo.clone());
    let create_event_use_case = CreateEventUseCase::new(event_repo.clone());
    let list_events_use_case = ListEventsUseCase::new(event_repo.clone());
    let get_event_use_case = GetEventUseCase::new(event_repo.clone());
    let update_event_use_case = UpdateEventUseCase::new(event_repo.clone());
    let delete_event_use_case = DeleteEventUseCase::new(event_repo.clone());
    let events_by_creator_use_case = EventsByCreatorUseCase::new(event_repo.clone());
    let attend_event_use_case = AttendEventUseCase::new(event_repo.clone());
    let cancel_attendance_use_case = CancelAttendanceUseCase::new(event_repo.clone());
    let list_participants_use_case = ListParticipantsUseCase::new(event_repo.clone());
    let favorite_event_use_case = FavoriteEventUseCase::new(event_repo.clone());
    let unfavorite_event_use_case = UnfavoriteEventUseCase::new(event_repo.clone());
    let list_favorites_use_case = ListFavoritesUseCase::new(event_repo);

    // Moderation use cases
    let submit_event_use_case = SubmitEventUseCase::new(review_repo.clone());
    let list_pending_use_case = ListPendingUseCase::new(review_repo.clone());
    let approve_event_use_case = ApproveEventUseCase::new(review_repo.clone());
    let reject_event_use_case = RejectEventUseCase::new(review_repo.clone());
    let edit_submission_use_case = EditSubmissionUseCase::new(review_repo);

    // Comment use cases
    let create_comment_use_case =
        CreateCommentUseCase::new(comment_repo.clone(), Arc::clone(&event_repo_arc));
    let list_event_comments_use_case = ListEventCommentsUseCase::new(comment_repo.clone());
    let delete_comment_use_case = DeleteCommentUseCase::new(comment_repo);

    // Admin use cases
    let grant_admin_use_case = GrantAdminUseCase::new(user_repo.clone());
    let revoke_admin_use_case = RevokeAdminUseCase::new(user_repo.clone());

    // Upload use cases
    let store_avatar_use_case =
        StoreAvatarUseCase::new(user_repo, Arc::clone(&file_store_arc));
    let store_event_image_use_case = StoreEventImageUseCase::new(Arc::clone(&file_store_arc));

    let state = AppState {
        current_user_resolver,
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        create_event_use_case: Arc::new(create_event_use_case),
        list_events_use_case: Arc::new(list_events_use_case),
        get_event_use_case: Arc::new(get_event_use_case),
        update_event_use_case: Arc::new(update_event_use_case),
        delete_event_use_case: Arc::new(delete_event_use_case),
        events_by_creator_use_case: Arc::new(events_by_creator_use_case),
        attend_event_use_case: Arc::new(attend_event_use_case),
        cancel_attendance_use_case: Arc::new(cancel_attendance_use_case),
        list_participants_use_case: Arc::new(list_participants_use_case),
        favorite_event_use_case: Arc::new(favorite_event_use_case),
        unfavorite_event_use_case: Arc::new(unfavorite_event_use_case),
        list_favorites_use_case: Arc::new(list_favorites_use_case),
        submit_event_use_case: Arc::new(submit_event_use_case),
        list_pending_use_case: Arc::new(list_pending_use_case),
        approve_event_use_case: Arc::new(approve_event_use_case),
        reject_event_use_case: Arc::new(reject_event_use_case),
        edit_submission_use_case: Arc::new(edit_submission_use_case),
        create_comment_use_case: Arc::new(create_comment_use_case),
        list_event_comments_use_case: Arc::new(list_event_comments_use_case),
        delete_comment_use_case: Arc::new(delete_comment_use_case),
        grant_admin_use_case: Arc::new(grant_admin_use_case),
        revoke_admin_use_case: Arc::new(revoke_admin_use_case),
        store_avatar_use_case: Arc::new(store_avatar_use_case),
        store_event_image_use_case: Arc::new(store_event_image_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(actix_files::Files::new("/media", media_root.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_me_handler);
    // Events: literal paths before /events/{event_id}
    cfg.service(crate::event::adapter::incoming::web::routes::create_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::list_events_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::list_favorites_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::events_by_user_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::get_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::update_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::delete_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::attend_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::cancel_attendance_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::list_participants_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::favorite_event_handler);
    cfg.service(crate::event::adapter::incoming::web::routes::unfavorite_event_handler);
    // Moderation
    cfg.service(crate::moderation::adapter::incoming::web::routes::submit_event_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::list_pending_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::approve_event_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::reject_event_handler);
    cfg.service(crate::moderation::adapter::incoming::web::routes::edit_submission_handler);
    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::list_event_comments_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::delete_comment_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::assign_admin_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::revoke_admin_handler);
    // Upload
    cfg.service(crate::upload::adapter::incoming::web::routes::upload_avatar_handler);
    cfg.service(crate::upload::adapter::incoming::web::routes::upload_event_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
