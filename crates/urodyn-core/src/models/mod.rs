pub mod cystometry;
pub mod diagnosis;
pub mod emg;
pub mod flow;
pub mod patient;
pub mod pressure_flow;
pub mod provocation;
pub mod result;
pub mod urethral;
pub mod vocabulary;
