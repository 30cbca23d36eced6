mod sign_up;
pub use sign_up::SignUp;

mod sign_in;
pub use sign_in::SignIn;

mod profile;
pub use profile::Profile;
