mod password;

pub use password::{
    PASSWORD_LENGTH, generate_password, generate_password_with, generate_passwords,
    is_password_char,
};
