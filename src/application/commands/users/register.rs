use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role, User, UserName},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The first account becomes the administrator. Later accounts need an
    /// actor holding `users:create`.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let name = UserName::new(command.name)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let existing = self.user_repo.count().await?;
        let role = determine_role(existing, actor, command.role)?;
        self.ensure_email_available(&email).await?;

        let user = self
            .create_and_insert_user(name, email, &command.password, role)
            .await?;
        tracing::info!(user_id = user.id.0, role = %user.role, "user registered");

        Ok(user.into())
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }
        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        name: UserName,
        email: Email,
        password: &str,
        role: Role,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(name, email, password_hash, role, self.clock.now());
        Ok(self.user_repo.insert(new_user).await?)
    }
}

fn determine_role(
    existing: u64,
    actor: Option<&AuthenticatedUser>,
    role: Option<Role>,
) -> ApplicationResult<Role> {
    if existing == 0 {
        return Ok(Role::Admin);
    }
    let requester = actor
        .ok_or_else(|| ApplicationError::unauthorized("administrative privileges are required"))?;
    ensure_capability(requester, "users", "create")?;
    Ok(role.unwrap_or_default())
}
