pub mod f16;
