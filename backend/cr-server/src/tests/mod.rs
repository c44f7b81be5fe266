mod api;
mod bot;
