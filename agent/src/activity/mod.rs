pub(crate) mod detect;
