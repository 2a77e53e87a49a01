use serde::Serialize;

/// Surname every [`User`] starts with.
pub const DEFAULT_SURNAME: &str = "Dan";

/// Name every [`ExtendedUser`] ends up with, whatever it was constructed with.
pub const EXTENDED_USER_NAME: &str = "John";

/// Shared accessor surface for [`User`] and everything built on top of one.
///
/// # Composition over inheritance
/// An [`ExtendedUser`] is not a subtype of [`User`]; it *holds* one. Implementors
/// only have to hand out their base entity, and every accessor comes for free as
/// a provided method. This keeps `name` reachable exclusively through
/// [`Person::name`] and [`Person::set_name`], no matter which wrapper you hold.
///
/// The trait is object safe, so a `Vec<Box<dyn Person>>` can mix both kinds.
pub trait Person {
    /// The base entity backing this person.
    fn base(&self) -> &User;

    /// Mutable access to the base entity.
    fn base_mut(&mut self) -> &mut User;

    /// Current name. No side effects.
    fn name(&self) -> &str {
        &self.base().name
    }

    /// Replaces the name unconditionally. Any string is accepted, including `""`.
    fn set_name(&mut self, value: String) {
        self.base_mut().name = value;
    }

    /// Current age.
    fn age(&self) -> u32 {
        self.base().age
    }

    /// Replaces the age.
    fn set_age(&mut self, age: u32) {
        self.base_mut().age = age;
    }

    /// The surname, verbatim.
    fn surname(&self) -> &str {
        &self.base().surname
    }
}

/// A person with a private name, a public age and a read-only surname.
///
/// `name` is a private field: outside this module it can only be read and written
/// through the [`Person`] accessors, and it is left out of the serialized form.
/// `surname` is visible to the crate but exposed publicly only through
/// [`Person::surname`]; it serializes as `_surname`.
///
/// ```
/// use script_recipe::model::{Person, User};
///
/// let mut user = User::new("Nat");
/// assert_eq!(user.name(), "Nat");
/// assert_eq!(user.age, 0);
/// assert_eq!(user.surname(), "Dan");
///
/// user.set_name("Kit".to_string());
/// assert_eq!(user.name(), "Kit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(skip)]
    name: String,
    pub age: u32,
    #[serde(rename = "_surname")]
    pub(crate) surname: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `name` - Stored as-is; no validation is performed
    ///
    /// # Notes
    /// `age` starts at `0` and `surname` at [`DEFAULT_SURNAME`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: 0,
            surname: DEFAULT_SURNAME.to_string(),
        }
    }
}

impl Person for User {
    fn base(&self) -> &User {
        self
    }

    fn base_mut(&mut self) -> &mut User {
        self
    }
}

/// A [`User`] that is constructed with an age and always ends up named
/// [`EXTENDED_USER_NAME`].
///
/// Construction runs the base constructor with the given name, sets the age, and
/// then overwrites the name through the setter. The `name` argument is accepted
/// but has no observable effect.
///
/// ```
/// use script_recipe::model::{ExtendedUser, Person};
///
/// let user = ExtendedUser::new("Ann", 42);
/// assert_eq!(user.name(), "John");
/// assert_eq!(user.age(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtendedUser {
    base: User,
}

impl ExtendedUser {
    /// Builds the base with `name`, sets `age`, then renames to [`EXTENDED_USER_NAME`].
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        let mut user = Self {
            base: User::new(name),
        };
        user.set_age(age);
        user.set_name(EXTENDED_USER_NAME.to_string());
        user
    }

    /// Borrows the wrapped base entity.
    pub fn as_user(&self) -> &User {
        &self.base
    }

    /// Unwraps the base entity.
    pub fn into_user(self) -> User {
        self.base
    }
}

impl Person for ExtendedUser {
    fn base(&self) -> &User {
        &self.base
    }

    fn base_mut(&mut self) -> &mut User {
        &mut self.base
    }
}

impl From<ExtendedUser> for User {
    fn from(user: ExtendedUser) -> Self {
        user.into_user()
    }
}
