mod create_user;
pub use create_user::CreateUserView;

mod view_user;
pub use view_user::ViewUserView;

mod edit_user;
pub use edit_user::EditUserView;

mod not_found;
pub use not_found::NotFoundView;
