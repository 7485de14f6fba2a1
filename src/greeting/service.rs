use async_trait::async_trait;

use super::{GettingUserNameRepository, GreetingError, SayHelloPort};

/// Application service that greets users by name.
///
/// The service holds no state of its own beyond the injected repository, so a
/// single instance can serve any number of calls.
pub struct HelloService<R: GettingUserNameRepository> {
    user_names: R,
}

impl<R: GettingUserNameRepository> HelloService<R> {
    /// Creates a new service backed by the given repository.
    pub fn new(user_names: R) -> Self {
        Self { user_names }
    }

    /// Looks up the user's name and formats the greeting.
    ///
    /// Repository errors are returned unchanged.
    pub async fn say_hello(&self, user_id: u64) -> Result<String, GreetingError> {
        let user_name = self.user_names.get_user_name(user_id).await?;
        Ok(make_hello_message(&user_name))
    }
}

#[async_trait]
impl<R: GettingUserNameRepository> SayHelloPort for HelloService<R> {
    async fn say_hello(&self, user_id: u64) -> Result<String, GreetingError> {
        HelloService::say_hello(self, user_id).await
    }
}

fn make_hello_message(user_name: &str) -> String {
    format!("Hello, {}!", user_name)
}
