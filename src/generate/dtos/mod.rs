pub mod generate_job_dto;
