//! Default stand-ins for every use case. Each answers with either an empty
//! success (for listings) or a "not wired" failure, so a route test only has
//! to replace the one use case it actually exercises.

use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::use_cases::grant_admin::{GrantAdminError, IGrantAdminUseCase};
use crate::admin::application::use_cases::revoke_admin::{IRevokeAdminUseCase, RevokeAdminError};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, UserProfile,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest, RegisteredUser,
};
use crate::comment::application::domain::entities::Comment;
use crate::comment::application::use_cases::create_comment::{
    CreateCommentError, ICreateCommentUseCase,
};
use crate::comment::application::use_cases::delete_comment::{
    DeleteCommentError, IDeleteCommentUseCase,
};
use crate::comment::application::use_cases::list_event_comments::{
    IListEventCommentsUseCase, ListEventCommentsError,
};
use crate::event::application::domain::entities::{Event, UserSummary};
use crate::event::application::ports::outgoing::event_repository::{
    CreateEventData, EventDetails, EventListItem, EventListQuery, EventPatch,
};
use crate::event::application::use_cases::attend_event::{AttendEventError, IAttendEventUseCase};
use crate::event::application::use_cases::cancel_attendance::{
    CancelAttendanceError, ICancelAttendanceUseCase,
};
use crate::event::application::use_cases::create_event::{CreateEventError, ICreateEventUseCase};
use crate::event::application::use_cases::delete_event::{DeleteEventError, IDeleteEventUseCase};
use crate::event::application::use_cases::events_by_creator::{
    EventsByCreatorError, IEventsByCreatorUseCase,
};
use crate::event::application::use_cases::favorite_event::{
    FavoriteEventError, IFavoriteEventUseCase,
};
use crate::event::application::use_cases::get_event::{GetEventError, IGetEventUseCase};
use crate::event::application::use_cases::list_events::{IListEventsUseCase, ListEventsError};
use crate::event::application::use_cases::list_favorites::{
    IListFavoritesUseCase, ListFavoritesError,
};
use crate::event::application::use_cases::list_participants::{
    IListParticipantsUseCase, ListParticipantsError,
};
use crate::event::application::use_cases::unfavorite_event::{
    IUnfavoriteEventUseCase, UnfavoriteEventError,
};
use crate::event::application::use_cases::update_event::{IUpdateEventUseCase, UpdateEventError};
use crate::moderation::application::domain::entities::ReviewEvent;
use crate::moderation::application::ports::outgoing::review_repository::SubmissionFields;
use crate::moderation::application::use_cases::approve_event::{
    ApproveEventError, IApproveEventUseCase,
};
use crate::moderation::application::use_cases::edit_submission::{
    EditSubmissionError, IEditSubmissionUseCase,
};
use crate::moderation::application::use_cases::list_pending::{
    IListPendingUseCase, ListPendingError,
};
use crate::moderation::application::use_cases::reject_event::{
    IRejectEventUseCase, RejectEventError,
};
use crate::moderation::application::use_cases::submit_event::{
    ISubmitEventUseCase, SubmitEventError,
};
use crate::upload::application::use_cases::store_avatar::{
    IStoreAvatarUseCase, StoreAvatarError,
};
use crate::upload::application::use_cases::store_event_image::{
    IStoreEventImageUseCase, StoreEventImageError,
};

const NOT_WIRED: &str = "not wired in this test";

/// Backs the default `CurrentUserResolver` in tests: yields the configured
/// user for any id lookup, or nothing.
#[derive(Clone, Default)]
pub struct ConfiguredUserRepo {
    pub user: Option<User>,
}

#[async_trait]
impl UserRepository for ConfiguredUserRepo {
    async fn insert_user(&self, _data: NewUser) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::DatabaseError(NOT_WIRED.to_string()))
    }

    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.user.clone())
    }

    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.user.clone())
    }

    async fn set_admin(
        &self,
        _user_id: Uuid,
        _is_admin: bool,
    ) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::DatabaseError(NOT_WIRED.to_string()))
    }

    async fn set_avatar_url(
        &self,
        _user_id: Uuid,
        _avatar_url: String,
    ) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::DatabaseError(NOT_WIRED.to_string()))
    }
}

// ==================== Auth ====================

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisteredUser, RegisterError> {
        Err(RegisterError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::RepositoryError(NOT_WIRED.to_string()))
    }
}

// ==================== Events ====================

pub struct StubCreateEventUseCase;

#[async_trait]
impl ICreateEventUseCase for StubCreateEventUseCase {
    async fn execute(&self, _data: CreateEventData) -> Result<Event, CreateEventError> {
        Err(CreateEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListEventsUseCase;

#[async_trait]
impl IListEventsUseCase for StubListEventsUseCase {
    async fn execute(
        &self,
        _query: EventListQuery,
    ) -> Result<Vec<EventListItem>, ListEventsError> {
        Ok(vec![])
    }
}

pub struct StubGetEventUseCase;

#[async_trait]
impl IGetEventUseCase for StubGetEventUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _viewer_id: Uuid,
    ) -> Result<EventDetails, GetEventError> {
        Err(GetEventError::NotFound)
    }
}

pub struct StubUpdateEventUseCase;

#[async_trait]
impl IUpdateEventUseCase for StubUpdateEventUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _actor_id: Uuid,
        _patch: EventPatch,
    ) -> Result<Event, UpdateEventError> {
        Err(UpdateEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeleteEventUseCase;

#[async_trait]
impl IDeleteEventUseCase for StubDeleteEventUseCase {
    async fn execute(&self, _event_id: Uuid, _actor_id: Uuid) -> Result<(), DeleteEventError> {
        Err(DeleteEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubEventsByCreatorUseCase;

#[async_trait]
impl IEventsByCreatorUseCase for StubEventsByCreatorUseCase {
    async fn execute(&self, _creator_id: Uuid) -> Result<Vec<Event>, EventsByCreatorError> {
        Ok(vec![])
    }
}

pub struct StubAttendEventUseCase;

#[async_trait]
impl IAttendEventUseCase for StubAttendEventUseCase {
    async fn execute(&self, _event_id: Uuid, _user_id: Uuid) -> Result<(), AttendEventError> {
        Err(AttendEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCancelAttendanceUseCase;

#[async_trait]
impl ICancelAttendanceUseCase for StubCancelAttendanceUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _user_id: Uuid,
    ) -> Result<(), CancelAttendanceError> {
        Err(CancelAttendanceError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListParticipantsUseCase;

#[async_trait]
impl IListParticipantsUseCase for StubListParticipantsUseCase {
    async fn execute(&self, _event_id: Uuid) -> Result<Vec<UserSummary>, ListParticipantsError> {
        Ok(vec![])
    }
}

pub struct StubFavoriteEventUseCase;

#[async_trait]
impl IFavoriteEventUseCase for StubFavoriteEventUseCase {
    async fn execute(&self, _event_id: Uuid, _user_id: Uuid) -> Result<(), FavoriteEventError> {
        Err(FavoriteEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubUnfavoriteEventUseCase;

#[async_trait]
impl IUnfavoriteEventUseCase for StubUnfavoriteEventUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _user_id: Uuid,
    ) -> Result<(), UnfavoriteEventError> {
        Err(UnfavoriteEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListFavoritesUseCase;

#[async_trait]
impl IListFavoritesUseCase for StubListFavoritesUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<Event>, ListFavoritesError> {
        Ok(vec![])
    }
}

// ==================== Moderation ====================

pub struct StubSubmitEventUseCase;

#[async_trait]
impl ISubmitEventUseCase for StubSubmitEventUseCase {
    async fn execute(
        &self,
        _fields: SubmissionFields,
        _actor_id: Uuid,
    ) -> Result<ReviewEvent, SubmitEventError> {
        Err(SubmitEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListPendingUseCase;

#[async_trait]
impl IListPendingUseCase for StubListPendingUseCase {
    async fn execute(&self) -> Result<Vec<ReviewEvent>, ListPendingError> {
        Ok(vec![])
    }
}

pub struct StubApproveEventUseCase;

#[async_trait]
impl IApproveEventUseCase for StubApproveEventUseCase {
    async fn execute(&self, _submission_id: Uuid) -> Result<Event, ApproveEventError> {
        Err(ApproveEventError::NotFound)
    }
}

pub struct StubRejectEventUseCase;

#[async_trait]
impl IRejectEventUseCase for StubRejectEventUseCase {
    async fn execute(&self, _submission_id: Uuid) -> Result<(), RejectEventError> {
        Err(RejectEventError::NotFound)
    }
}

pub struct StubEditSubmissionUseCase;

#[async_trait]
impl IEditSubmissionUseCase for StubEditSubmissionUseCase {
    async fn execute(
        &self,
        _submission_id: Uuid,
        _actor_id: Uuid,
        _fields: SubmissionFields,
    ) -> Result<ReviewEvent, EditSubmissionError> {
        Err(EditSubmissionError::NotFound)
    }
}

// ==================== Comments ====================

pub struct StubCreateCommentUseCase;

#[async_trait]
impl ICreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _text: String,
        _actor_id: Uuid,
    ) -> Result<Comment, CreateCommentError> {
        Err(CreateCommentError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListEventCommentsUseCase;

#[async_trait]
impl IListEventCommentsUseCase for StubListEventCommentsUseCase {
    async fn execute(&self, _event_id: Uuid) -> Result<Vec<Comment>, ListEventCommentsError> {
        Ok(vec![])
    }
}

pub struct StubDeleteCommentUseCase;

#[async_trait]
impl IDeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(&self, _comment_id: Uuid, _actor_id: Uuid) -> Result<(), DeleteCommentError> {
        Err(DeleteCommentError::NotFound)
    }
}

// ==================== Admin ====================

pub struct StubGrantAdminUseCase;

#[async_trait]
impl IGrantAdminUseCase for StubGrantAdminUseCase {
    async fn execute(&self, _target_user_id: Uuid) -> Result<User, GrantAdminError> {
        Err(GrantAdminError::NotFound)
    }
}

pub struct StubRevokeAdminUseCase;

#[async_trait]
impl IRevokeAdminUseCase for StubRevokeAdminUseCase {
    async fn execute(
        &self,
        _target_user_id: Uuid,
        _acting_admin_id: Uuid,
    ) -> Result<User, RevokeAdminError> {
        Err(RevokeAdminError::NotFound)
    }
}

// ==================== Upload ====================

pub struct StubStoreAvatarUseCase;

#[async_trait]
impl IStoreAvatarUseCase for StubStoreAvatarUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _original_filename: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, StoreAvatarError> {
        Err(StoreAvatarError::StorageError(NOT_WIRED.to_string()))
    }
}

pub struct StubStoreEventImageUseCase;

#[async_trait]
impl IStoreEventImageUseCase for StubStoreEventImageUseCase {
    async fn execute(
        &self,
        _original_filename: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, StoreEventImageError> {
        Err(StoreEventImageError::StorageError(NOT_WIRED.to_string()))
    }
}
