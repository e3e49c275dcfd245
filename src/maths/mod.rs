pub mod fastshader;
