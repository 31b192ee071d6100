pub static API_URL: &str = "https://api.uploadthing.com";
