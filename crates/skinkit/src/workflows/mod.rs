pub mod skincare;
