mod account;
mod auth_token;
mod classification;
mod gallery_image;
mod game_match;
mod match_series;
mod participant;
mod team;
mod tournament;
