pub mod uploadthing_presign_response;
