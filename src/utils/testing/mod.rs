// testing utilities for driving real git repositories

pub mod git_utils;

pub use git_utils::TestGitRepo;
