pub mod generate_dto;
