use std::sync::Arc;

use crate::admin::application::use_cases::grant_admin::IGrantAdminUseCase;
use crate::admin::application::use_cases::revoke_admin::IRevokeAdminUseCase;
use crate::auth::application::domain::entities::User;
use crate::auth::application::helpers::CurrentUserResolver;
use crate::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::comment::application::use_cases::create_comment::ICreateCommentUseCase;
use crate::comment::application::use_cases::delete_comment::IDeleteCommentUseCase;
use crate::comment::application::use_cases::list_event_comments::IListEventCommentsUseCase;
use crate::event::application::use_cases::attend_event::IAttendEventUseCase;
use crate::event::application::use_cases::cancel_attendance::ICancelAttendanceUseCase;
use crate::event::application::use_cases::create_event::ICreateEventUseCase;
use crate::event::application::use_cases::delete_event::IDeleteEventUseCase;
use crate::event::application::use_cases::events_by_creator::IEventsByCreatorUseCase;
use crate::event::application::use_cases::favorite_event::IFavoriteEventUseCase;
use crate::event::application::use_cases::get_event::IGetEventUseCase;
use crate::event::application::use_cases::list_events::IListEventsUseCase;
use crate::event::application::use_cases::list_favorites::IListFavoritesUseCase;
use crate::event::application::use_cases::list_participants::IListParticipantsUseCase;
use crate::event::application::use_cases::unfavorite_event::IUnfavoriteEventUseCase;
use crate::event::application::use_cases::update_event::IUpdateEventUseCase;
use crate::moderation::application::use_cases::approve_event::IApproveEventUseCase;
use crate::moderation::application::use_cases::edit_submission::IEditSubmissionUseCase;
use crate::moderation::application::use_cases::list_pending::IListPendingUseCase;
use crate::moderation::application::use_cases::reject_event::IRejectEventUseCase;
use crate::moderation::application::use_cases::submit_event::ISubmitEventUseCase;
use crate::tests::support::stubs::*;
use crate::upload::application::use_cases::store_avatar::IStoreAvatarUseCase;
use crate::upload::application::use_cases::store_event_image::IStoreEventImageUseCase;
use crate::AppState;

/// Builds an [`AppState`] whose every use case is a stub, then lets a test
/// swap in the ones it exercises. `with_current_user` wires the identity
/// resolver to recognize that user's token subject.
pub struct TestAppStateBuilder {
    current_user: Option<User>,
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    create_event: Arc<dyn ICreateEventUseCase + Send + Sync>,
    list_events: Arc<dyn IListEventsUseCase + Send + Sync>,
    get_event: Arc<dyn IGetEventUseCase + Send + Sync>,
    update_event: Arc<dyn IUpdateEventUseCase + Send + Sync>,
    delete_event: Arc<dyn IDeleteEventUseCase + Send + Sync>,
    events_by_creator: Arc<dyn IEventsByCreatorUseCase + Send + Sync>,
    attend_event: Arc<dyn IAttendEventUseCase + Send + Sync>,
    cancel_attendance: Arc<dyn ICancelAttendanceUseCase + Send + Sync>,
    list_participants: Arc<dyn IListParticipantsUseCase + Send + Sync>,
    favorite_event: Arc<dyn IFavoriteEventUseCase + Send + Sync>,
    unfavorite_event: Arc<dyn IUnfavoriteEventUseCase + Send + Sync>,
    list_favorites: Arc<dyn IListFavoritesUseCase + Send + Sync>,
    submit_event: Arc<dyn ISubmitEventUseCase + Send + Sync>,
    list_pending: Arc<dyn IListPendingUseCase + Send + Sync>,
    approve_event: Arc<dyn IApproveEventUseCase + Send + Sync>,
    reject_event: Arc<dyn IRejectEventUseCase + Send + Sync>,
    edit_submission: Arc<dyn IEditSubmissionUseCase + Send + Sync>,
    create_comment: Arc<dyn ICreateCommentUseCase + Send + Sync>,
    list_event_comments: Arc<dyn IListEventCommentsUseCase + Send + Sync>,
    delete_comment: Arc<dyn IDeleteCommentUseCase + Send + Sync>,
    grant_admin: Arc<dyn IGrantAdminUseCase + Send + Sync>,
    revoke_admin: Arc<dyn IRevokeAdminUseCase + Send + Sync>,
    store_avatar: Arc<dyn IStoreAvatarUseCase + Send + Sync>,
    store_event_image: Arc<dyn IStoreEventImageUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            current_user: None,
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            create_event: Arc::new(StubCreateEventUseCase),
            list_events: Arc::new(StubListEventsUseCase),
            get_event: Arc::new(StubGetEventUseCase),
            update_event: Arc::new(StubUpdateEventUseCase),
            delete_event: Arc::new(StubDeleteEventUseCase),
            events_by_creator: Arc::new(StubEventsByCreatorUseCase),
            attend_event: Arc::new(StubAttendEventUseCase),
            cancel_attendance: Arc::new(StubCancelAttendanceUseCase),
            list_participants: Arc::new(StubListParticipantsUseCase),
            favorite_event: Arc::new(StubFavoriteEventUseCase),
            unfavorite_event: Arc::new(StubUnfavoriteEventUseCase),
            list_favorites: Arc::new(StubListFavoritesUseCase),
            submit_event: Arc::new(StubSubmitEventUseCase),
            list_pending: Arc::new(StubListPendingUseCase),
            approve_event: Arc::new(StubApproveEventUseCase),
            reject_event: Arc::new(StubRejectEventUseCase),
            edit_submission: Arc::new(StubEditSubmissionUseCase),
            create_comment: Arc::new(StubCreateCommentUseCase),
            list_event_comments: Arc::new(StubListEventCommentsUseCase),
            delete_comment: Arc::new(StubDeleteCommentUseCase),
            grant_admin: Arc::new(StubGrantAdminUseCase),
            revoke_admin: Arc::new(StubRevokeAdminUseCase),
            store_avatar: Arc::new(StubStoreAvatarUseCase),
            store_event_image: Arc::new(StubStoreEventImageUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_current_user(mut self, user: User) -> Self {
        self.current_user = Some(user);
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_create_event(
        mut self,
        uc: impl ICreateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_event = Arc::new(uc);
        self
    }

    pub fn with_list_events(mut self, uc: impl IListEventsUseCase + Send + Sync + 'static) -> Self {
        self.list_events = Arc::new(uc);
        self
    }

    pub fn with_get_event(mut self, uc: impl IGetEventUseCase + Send + Sync + 'static) -> Self {
        self.get_event = Arc::new(uc);
        self
    }

    pub fn with_update_event(
        mut self,
        uc: impl IUpdateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_event = Arc::new(uc);
        self
    }

    pub fn with_delete_event(
        mut self,
        uc: impl IDeleteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_event = Arc::new(uc);
        self
    }

    pub fn with_events_by_creator(
        mut self,
        uc: impl IEventsByCreatorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.events_by_creator = Arc::new(uc);
        self
    }

    pub fn with_attend_event(
        mut self,
        uc: impl IAttendEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.attend_event = Arc::new(uc);
        self
    }

    pub fn with_cancel_attendance(
        mut self,
        uc: impl ICancelAttendanceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cancel_attendance = Arc::new(uc);
        self
    }

    pub fn with_list_participants(
        mut self,
        uc: impl IListParticipantsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_participants = Arc::new(uc);
        self
    }

    pub fn with_favorite_event(
        mut self,
        uc: impl IFavoriteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.favorite_event = Arc::new(uc);
        self
    }

    pub fn with_unfavorite_event(
        mut self,
        uc: impl IUnfavoriteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.unfavorite_event = Arc::new(uc);
        self
    }

    pub fn with_list_favorites(
        mut self,
        uc: impl IListFavoritesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_favorites = Arc::new(uc);
        self
    }

    pub fn with_submit_event(
        mut self,
        uc: impl ISubmitEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_event = Arc::new(uc);
        self
    }

    pub fn with_list_pending(
        mut self,
        uc: impl IListPendingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_pending = Arc::new(uc);
        self
    }

    pub fn with_approve_event(
        mut self,
        uc: impl IApproveEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.approve_event = Arc::new(uc);
        self
    }

    pub fn with_reject_event(
        mut self,
        uc: impl IRejectEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reject_event = Arc::new(uc);
        self
    }

    pub fn with_edit_submission(
        mut self,
        uc: impl IEditSubmissionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.edit_submission = Arc::new(uc);
        self
    }

    pub fn with_create_comment(
        mut self,
        uc: impl ICreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_comment = Arc::new(uc);
        self
    }

    pub fn with_list_event_comments(
        mut self,
        uc: impl IListEventCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_event_comments = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl IDeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_comment = Arc::new(uc);
        self
    }

    pub fn with_grant_admin(
        mut self,
        uc: impl IGrantAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.grant_admin = Arc::new(uc);
        self
    }

    pub fn with_revoke_admin(
        mut self,
        uc: impl IRevokeAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.revoke_admin = Arc::new(uc);
        self
    }

    pub fn with_store_avatar(
        mut self,
        uc: impl IStoreAvatarUseCase + Send + Sync + 'static,
    ) -> Self {
        self.store_avatar = Arc::new(uc);
        self
    }

    pub fn with_store_event_image(
        mut self,
        uc: impl IStoreEventImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.store_event_image = Arc::new(uc);
        self
    }

    pub fn build(self) -> AppState {
        let current_user_resolver = CurrentUserResolver::new(Arc::new(ConfiguredUserRepo {
            user: self.current_user,
        }));

        AppState {
            current_user_resolver,
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            fetch_profile_use_case: self.fetch_profile,
            create_event_use_case: self.create_event,
            list_events_use_case: self.list_events,
            get_event_use_case: self.get_event,
            update_event_use_case: self.update_event,
            delete_event_use_case: self.delete_event,
            events_by_creator_use_case: self.events_by_creator,
            attend_event_use_case: self.attend_event,
            cancel_attendance_use_case: self.cancel_attendance,
            list_participants_use_case: self.list_participants,
            favorite_event_use_case: self.favorite_event,
            unfavorite_event_use_case: self.unfavorite_event,
            list_favorites_use_case: self.list_favorites,
            submit_event_use_case: self.submit_event,
            list_pending_use_case: self.list_pending,
            approve_event_use_case: self.approve_event,
            reject_event_use_case: self.reject_event,
            edit_submission_use_case: self.edit_submission,
            create_comment_use_case: self.create_comment,
            list_event_comments_use_case: self.list_event_comments,
            delete_comment_use_case: self.delete_comment,
            grant_admin_use_case: self.grant_admin,
            revoke_admin_use_case: self.revoke_admin,
            store_avatar_use_case: self.store_avatar,
            store_event_image_use_case: self.store_event_image,
        }
    }
}
